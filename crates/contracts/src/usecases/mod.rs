pub mod u501_upload_document;
