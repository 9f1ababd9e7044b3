use anyhow::Result;
use orderdesk_core::credential;

pub fn run(password: &str) -> Result<()> {
    println!("{}", credential::sha256_hex(password));
    Ok(())
}
