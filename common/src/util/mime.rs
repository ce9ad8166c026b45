use std::{path::Path, str::FromStr};

use mime::Mime;

/// Media types accepted as input by the create PDF operation, keyed by extension.
pub fn get_media_type(filename: &Path) -> Option<Mime> {
    let extension = filename.extension()?.to_str()?.to_ascii_lowercase();
    let media_type = match extension.as_str() {
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "doc" => "application/msword",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "ppt" => "application/vnd.ms-powerpoint",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "xls" => "application/vnd.ms-excel",
        "rtf" => "application/rtf",
        "txt" => return Some(mime::TEXT_PLAIN),
        "bmp" => return Some(mime::IMAGE_BMP),
        "gif" => return Some(mime::IMAGE_GIF),
        "jpg" | "jpeg" => return Some(mime::IMAGE_JPEG),
        "png" => return Some(mime::IMAGE_PNG),
        "tif" | "tiff" => "image/tiff",
        "pdf" => return Some(mime::APPLICATION_PDF),
        _ => return None,
    };
    Mime::from_str(media_type).ok()
}

pub fn get_content_type(media_type: Option<&str>) -> Mime {
    media_type.and_then(|media_type| Mime::from_str(media_type).ok()).unwrap_or(mime::APPLICATION_PDF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_office_documents() {
        let docx = get_media_type(Path::new("resources/createPDFInput.docx")).unwrap();
        assert_eq!(docx.essence_str(), "application/vnd.openxmlformats-officedocument.wordprocessingml.document");
        assert_eq!(get_media_type(Path::new("slides.PPTX")).unwrap().essence_str(), "application/vnd.openxmlformats-officedocument.presentationml.presentation");
        assert_eq!(get_media_type(Path::new("scan.tiff")).unwrap().essence_str(), "image/tiff");
        assert_eq!(get_media_type(Path::new("photo.jpeg")).unwrap(), mime::IMAGE_JPEG);
    }

    #[test]
    fn unknown_extensions_are_unsupported() {
        assert!(get_media_type(Path::new("archive.zip")).is_none());
        assert!(get_media_type(Path::new("README")).is_none());
    }

    #[test]
    fn content_type_falls_back_to_pdf() {
        assert_eq!(get_content_type(None), mime::APPLICATION_PDF);
        assert_eq!(get_content_type(Some("not a mime")), mime::APPLICATION_PDF);
        assert_eq!(get_content_type(Some("image/png")), mime::IMAGE_PNG);
    }
}
