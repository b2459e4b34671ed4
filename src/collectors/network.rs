//! Network facts.

use std::net::{IpAddr, UdpSocket};

/// Local IPv4 address of the default route interface. Opening a UDP socket
/// towards a public address selects the right interface without sending any
/// traffic.
pub fn local_ip() -> String {
    let Ok(socket) = UdpSocket::bind("0.0.0.0:0") else {
        return String::new();
    };
    if socket.connect("8.8.8.8:80").is_err() {
        return String::new();
    }
    match socket.local_addr() {
        Ok(addr) => match addr.ip() {
            IpAddr::V4(ip) => ip.to_string(),
            IpAddr::V6(_) => String::new(),
        },
        Err(_) => String::new(),
    }
}
