use crate::api::ApiClient;
use crate::error::Result;

pub fn run(api_url: &str) -> Result<()> {
    let client = ApiClient::new(api_url);
    client.ping()?;
    println!("Service is up at {api_url}");
    Ok(())
}
