//! Response decorators demo.

use serde_json::Value;
use structural_patterns::Result;
use structural_patterns::decorator::UserRole::{Author, Debugger, Editor};
use structural_patterns::decorator::{ApiResponse, DEMO_POST_ID, handle_api_request, respond_with_layers};
use structural_patterns::logging::{DEFAULT_FILTER, init_tracing};

fn main() -> Result<()> {
    init_tracing(DEFAULT_FILTER)?;

    let requests = [vec![], vec![Author], vec![Author, Editor], vec![Editor, Debugger]];

    println!("=== Decorators as wrapper functions ===");
    for roles in &requests {
        println!("{}", handle_api_request(roles));
        println!();
    }

    println!("=== Decorators as layered objects ===");
    for roles in &requests {
        let body = respond_with_layers(DEMO_POST_ID, roles).generate();
        println!("{}", Value::Object(body));
    }

    Ok(())
}
