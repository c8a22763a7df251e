/// Seam between the API client and whatever supplies its configuration,
/// so tests can point the client at a mock server.
pub trait ConfigProvider: Send + Sync {
    /// Base address of the backend, e.g. `http://localhost:8000`.
    fn api_base(&self) -> &str;
}
