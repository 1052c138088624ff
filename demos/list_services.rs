//! Service listing example for the Canada Post library.
//!
//! This example demonstrates how to:
//! - List the available shipping services, optionally for one destination country
//! - Follow a service link to fetch the service details
//!
//! Usage:
//! ```
//! # All services
//! CPC_API_KEY=your_api_key cargo run --example list_services
//!
//! # Services to one country
//! CPC_API_KEY=your_api_key cargo run --example list_services -- US
//! ```

use canadapost_xml::{CanadaPostClient, Environment};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let api_key = env::var("CPC_API_KEY").expect("CPC_API_KEY environment variable must be set");

    let args: Vec<String> = env::args().collect();
    let country = args.get(1).map(|code| code.to_uppercase());

    let client = CanadaPostClient::new(&api_key, Environment::Sandbox)?;

    match &country {
        Some(code) => println!("Listing services to {}...", code),
        None => println!("Listing all services..."),
    }
    let services = client.get_services(country.as_deref()).await?;

    println!("\n=== Services ===");
    for service in &services.service {
        println!("{}: {}", service.service_code, service.service_name);
    }

    // Drill into the first service through its link
    if let Some(link) = services.service.first().and_then(|s| s.link.as_ref()) {
        println!("\nFetching details for {}...", services.service[0].service_code);
        let details = client.get_service_details(&link.href, &link.media_type).await?;

        println!("\n=== {} ===", details.service_name);
        if let Some(comment) = &details.comment {
            println!("{}", comment);
        }

        if let Some(options) = &details.options {
            println!("Options:");
            for option in &options.option {
                let name = option.option_name.as_deref().unwrap_or(&option.option_code);
                match option.qualifier_max {
                    Some(max) => println!("  {} (up to {})", name, max),
                    None => println!("  {}", name),
                }
            }
        }

        if let Some(weight) = details
            .restrictions
            .as_ref()
            .and_then(|r| r.weight_restriction.as_ref())
        {
            println!(
                "Weight: {} to {} g",
                weight.min.unwrap_or(0.0),
                weight.max.unwrap_or(f64::INFINITY)
            );
        }
    }

    Ok(())
}
