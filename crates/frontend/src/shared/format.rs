/// Human-readable size for the staged-file card
/// Example: 2048.0 -> "2.00 KB"
pub fn format_file_size(bytes: f64) -> String {
    format!("{:.2} KB", bytes / 1024.0)
}
