pub mod tempfiles;
