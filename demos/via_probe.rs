use std::error::Error;
use std::io::{Read, Write};
use std::process::ExitCode;

use qmk_via_api::transport::DeviceFilter;
use qmk_via_api::{ClientError, ConnectOptions, Keycode, ViaClient};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let filter = match args.as_slice() {
        [] => DeviceFilter::default(),
        [vid, pid] => DeviceFilter::new(parse_id(vid)?, parse_id(pid)?),
        [vid, pid, serial] => DeviceFilter::new(parse_id(vid)?, parse_id(pid)?).with_serial(serial),
        _ => {
            print_usage();
            return Ok(());
        }
    };

    let client = ViaClient::connect_hid(ConnectOptions {
        filter,
        ..Default::default()
    })?;
    if let Some(keyboard) = client.keyboard() {
        println!(
            "Keyboard: {} ({:04x}:{:04x})",
            keyboard.product_name, keyboard.vendor_id, keyboard.product_id
        );
    }

    run_probe(client)
}

fn run_probe<T: Read + Write>(mut client: ViaClient<T>) -> Result<(), Box<dyn Error>> {
    println!("Protocol: 0x{:04x}", client.get_protocol_version()?);
    println!("Uptime: {} ms", client.get_uptime()?);
    println!("Layout options: 0x{:08x}", client.get_layout_options()?);

    let layers = client.get_layer_count()?;
    println!("Layers: {layers}");
    if layers > 0 {
        let keycode: Keycode = client.get_keycode(0, 0, 0)?;
        println!("Key 0/0/0: {keycode} (0x{:04x})", keycode.raw());
    }

    match client.get_rgblight_color() {
        Ok(color) => {
            println!("RGB color: {color} ({})", color.to_hex_string());
            println!("RGB effect: {}", client.get_rgblight_effect()?);
        }
        Err(ClientError::UnknownCommand { .. }) => println!("RGB light: not supported"),
        Err(err) => return Err(Box::new(err)),
    }

    let count = client.get_macro_count()?;
    println!(
        "Macros: {count} slots, {} byte buffer",
        client.get_macro_buffer_size()?
    );
    for index in 0..count {
        let text = match client.get_macro(index) {
            Ok(text) => text,
            Err(ClientError::MacroNotFound { .. }) => continue,
            Err(err) => return Err(Box::new(err)),
        };
        if !text.is_empty() {
            println!("  {index}: {:?}", String::from_utf8_lossy(&text));
        }
    }

    Ok(())
}

fn parse_id(value: &str) -> Result<u16, Box<dyn Error>> {
    let digits = value.trim_start_matches("0x");
    Ok(u16::from_str_radix(digits, 16)?)
}

fn print_usage() {
    println!("Usage:");
    println!("  cargo run --example via_probe");
    println!("  cargo run --example via_probe -- <VID> <PID> [SERIAL]");
}
