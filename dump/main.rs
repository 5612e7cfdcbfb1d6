// Simple tool to decode the names in a hex encoded DNS message.
// dnsname-dump {hex} [offset...]
mod util;

use dnsname::{decode_name, MessageBuffer};
use log::info;
use std::env;
use std::process;

/// Size of a DNS message header, where the first question usually begins.
const HEADER_LEN: usize = 12;

// A simple type alias so as to DRY.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Debug, PartialEq)]
struct Args {
    /// The raw message
    message: Vec<u8>,

    /// Offsets to decode names at
    offsets: Vec<usize>,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Args> {
    let mut message = None;
    let mut offsets = Vec::new();

    for arg in args {
        if message.is_none() {
            // Allow the hex to be copied from a dump, e.g. "03 77 77 77"
            let hex: String = arg.split_whitespace().collect();
            message = Some(hex::decode(hex).map_err(|e| format!("Invalid hex message: {}", e))?);
            continue;
        }

        let offset = match arg.strip_prefix("0x") {
            Some(h) => usize::from_str_radix(h, 16),
            None => arg.parse(),
        };
        offsets.push(offset.map_err(|e| format!("Invalid offset '{}': {}", arg, e))?);
    }

    let message = message.ok_or("Missing hex message")?;

    if offsets.is_empty() {
        // By default decode the first question's name, if there is room for one
        offsets.push(if message.len() > HEADER_LEN { HEADER_LEN } else { 0 });
    }

    Ok(Args { message, offsets })
}

fn main() -> Result<()> {
    env_logger::init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Usage: dnsname-dump {{hex}} [offset...]");
            process::exit(1);
        }
    };

    let buf: MessageBuffer = MessageBuffer::from_slice(&args.message)?;
    info!("loaded {} byte message", buf.len());

    println!("message:");
    print!("{}", util::hexdump(buf.as_slice()));
    println!();

    for offset in args.offsets {
        match decode_name(&buf, offset) {
            Ok((name, next)) => println!("offset {}: {} (next {})", offset, name, next),
            Err(e) => println!("offset {}: error: {}", offset, e),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(a: &[&str]) -> Result<Args> {
        parse_args(a.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(
            args(&["0377777700", "0", "0x10"]).unwrap(),
            Args {
                message: vec![3, b'w', b'w', b'w', 0],
                offsets: vec![0, 16],
            }
        );

        assert_eq!(
            args(&["03 77 77 77 00"]).unwrap().message,
            vec![3, b'w', b'w', b'w', 0]
        );
    }

    #[test]
    fn test_default_offset() {
        assert_eq!(args(&["00"]).unwrap().offsets, vec![0]);
        assert_eq!(
            args(&["abcd0100000100000000000000"]).unwrap().offsets,
            vec![HEADER_LEN]
        );
    }

    #[test]
    fn test_bad_args() {
        assert!(args(&[]).is_err());
        assert!(args(&["0g"]).is_err());
        assert!(args(&["00", "-1"]).is_err());
        assert!(args(&["00", "0xzz"]).is_err());
    }
}
