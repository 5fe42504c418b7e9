use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};

use crate::config::SiteConfig;

pub mod routes;
pub mod static_files;

pub fn run_server(config: &SiteConfig, bind_addr: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(bind_addr)?;
    tracing::info!("rising server listening on http://{bind_addr}");

    for stream in listener.incoming() {
        match stream {
            Ok(mut stream) => {
                if let Err(err) = handle_connection(config, &mut stream) {
                    tracing::warn!("request error: {err}");
                }
            }
            Err(err) => tracing::warn!("connection failed: {err}"),
        }
    }

    Ok(())
}

fn handle_connection(config: &SiteConfig, stream: &mut TcpStream) -> std::io::Result<()> {
    let mut buffer = [0_u8; 16_384];
    let bytes_read = stream.read(&mut buffer)?;
    if bytes_read == 0 {
        return Ok(());
    }

    let request = String::from_utf8_lossy(&buffer[..bytes_read]);
    let request_line = request.lines().next().unwrap_or_default();
    let mut request_parts = request_line.split_whitespace();
    let method = request_parts.next().unwrap_or("GET");
    let path = request_parts.next().unwrap_or("/");
    tracing::debug!("{method} {path}");

    let response = routes::route_request(config, method, path).to_http_bytes();
    stream.write_all(&response)?;
    stream.flush()?;
    Ok(())
}
