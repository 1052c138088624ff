//! Parcel tracking example for the Canada Post library.
//!
//! Usage:
//! ```
//! CPC_API_KEY=your_api_key cargo run --example track_package -- 1371134583769923
//! ```

use canadapost_xml::{CanadaPostClient, CanadaPostError, Environment};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let api_key = env::var("CPC_API_KEY").expect("CPC_API_KEY environment variable must be set");

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <tracking-pin>", args[0]);
        std::process::exit(1);
    }
    let pin = &args[1];

    let client = CanadaPostClient::new(&api_key, Environment::Production)?;

    println!("Tracking {}...", pin);
    match client.get_tracking_details(pin).await {
        Ok(detail) => {
            println!("\n=== Tracking Details ===");
            println!("PIN: {}", detail.pin);

            if let Some(service) = &detail.service_name {
                println!("Service: {}", service);
            }

            if let Some(date) = &detail.expected_delivery_date {
                println!("Expected delivery: {}", date);
            }

            if let Some(events) = &detail.significant_events {
                println!("\nEvents (newest first):");
                for event in &events.occurrence {
                    let description = event.event_description.as_deref().unwrap_or("(no description)");
                    println!(
                        "  {} {} - {}",
                        event.event_date.as_deref().unwrap_or(""),
                        event.event_time.as_deref().unwrap_or(""),
                        description
                    );
                    if let Some(signatory) = &event.signatory_name {
                        println!("    Signed by: {}", signatory);
                    }
                }
            }
        }
        Err(CanadaPostError::Carrier { messages }) => {
            eprintln!("Canada Post could not track this parcel:");
            for message in messages {
                eprintln!("  [{}] {}", message.code, message.description);
            }
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Tracking error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
