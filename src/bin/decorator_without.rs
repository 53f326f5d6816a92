//! Responses without decorators: one function checks every role.

use serde_json::Value;
use structural_patterns::Result;
use structural_patterns::decorator::UserRole::{Author, Debugger, Editor};
use structural_patterns::decorator::{DEMO_POST_ID, inline_response};
use structural_patterns::logging::{DEFAULT_FILTER, init_tracing};

fn main() -> Result<()> {
    init_tracing(DEFAULT_FILTER)?;

    for roles in [vec![], vec![Author], vec![Author, Editor], vec![Editor, Debugger]] {
        println!("--- New Request ---");
        println!("Context: Request with {} special role(s).", roles.len());
        println!();
        println!("Final JSON Response:");
        println!("{:#}", Value::Object(inline_response(DEMO_POST_ID, &roles)));
        println!("---------------------");
        println!();
    }

    Ok(())
}
