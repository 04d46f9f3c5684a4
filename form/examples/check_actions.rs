//! Validate every command line argument as an access map action.
//!
//! Prints the normalized form of each valid action and exits with an error
//! if any of them is refused.

use std::env;

use miette::{miette, Result};
use postfix_access_common::keyword::Keyword;
use postfix_access_common::Canonical;
use postfix_access_form::{AccessActionForm, FormOptions};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = FormOptions::default_postfix();
    let mut failed = 0_usize;

    for action in env::args().skip(1) {
        match AccessActionForm::new(&action, "").clean(&options) {
            Ok(cleaned) => {
                println!("{:?} => {}", action, cleaned.normalized());
                println!("  effects: {:?}", cleaned.action().kind().effects());
                let leading = cleaned.normalized().split_whitespace().next();
                if let Some(keyword) = leading.and_then(Keyword::lookup) {
                    println!("  {keyword}: {}", keyword.summary());
                }
            }
            Err(e) => {
                failed += 1;
                println!("{action:?} refused: {e}");
                if let Some(offset) = e.offset() {
                    println!("  {}: at character {offset}", e.field());
                }
            }
        }
    }

    if failed > 0 {
        return Err(miette!("{failed} action(s) refused"));
    }
    Ok(())
}
