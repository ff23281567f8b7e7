//! # SwiftConnect Site Entry Point
//!
//! Runs the form host as a JSON-lines console.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Load configuration from the environment
//! 3. Create state objects (notifications, tracking blocks, buttons)
//! 4. Serve one command per stdin line until EOF

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // The actual setup is in lib.rs for better testability
    swiftconnect_site_lib::run().await
}
