use rand::{distributions::Alphanumeric, thread_rng, Rng};

pub fn generate_temp_suffix() -> String {
    thread_rng().sample_iter(&Alphanumeric).take(16).map(char::from).collect()
}
