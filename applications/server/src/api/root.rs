/// Root route
pub async fn index() -> &'static str {
    "Play Back End"
}
