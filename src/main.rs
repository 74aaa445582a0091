use std::process;

use anyhow::Context;
use toy_rsa::{Protocol, ProtocolConfig};

const DEFAULT_MESSAGE: &str =
    "You're the antenna catching vibration. I'm the transmitter. Here's information!";

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let message = if args.is_empty() {
        DEFAULT_MESSAGE.to_string()
    } else {
        args.join(" ")
    };

    println!("[private] Alice's message: {}", message);

    let protocol = Protocol::new(ProtocolConfig::default()).context("setting up key material")?;
    let transmission = protocol
        .transmit(&message, &mut rand::thread_rng())
        .context("transmitting message")?;

    for (i, block) in transmission.blocks.iter().enumerate() {
        let (c_hex, s_hex) = block.to_hex();
        println!(
            "[public] Alice's block {} to Bob: {} [hex {} / {}]",
            i + 1,
            block,
            c_hex,
            s_hex
        );
    }

    println!("[private] Bob's decoded message from Alice: {}", transmission.decoded);
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
