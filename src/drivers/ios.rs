use std::io::Read;
use std::net::{TcpStream, ToSocketAddrs};

use crate::drivers::{ConnectionParams, Facts, NetworkDriver};
use crate::error::DriverError;

const VENDOR: &str = "Cisco";
const SHOW_VERSION: &str = "show version";

/// Cisco IOS over SSH. Facts come from `show version`.
pub struct IosDriver {
    params: ConnectionParams,
    session: Option<ssh2::Session>,
}

impl IosDriver {
    pub fn new(params: ConnectionParams) -> Self {
        IosDriver {
            params,
            session: None,
        }
    }

    pub fn boxed(params: ConnectionParams) -> Box<dyn NetworkDriver> {
        Box::new(IosDriver::new(params))
    }

    fn run_command(&self, command: &str) -> Result<String, DriverError> {
        let session = self.session.as_ref().ok_or(DriverError::NotOpen)?;

        let mut channel = session.channel_session()?;
        channel.exec(command)?;

        let mut output = String::new();
        channel.read_to_string(&mut output)?;
        channel.wait_close()?;

        let status = channel.exit_status()?;
        if status != 0 {
            return Err(DriverError::Command {
                command: command.to_string(),
                status,
            });
        }

        tracing::debug!(address = %self.params.address, command, bytes = output.len(), "command output received");
        Ok(output)
    }
}

impl NetworkDriver for IosDriver {
    fn open(&mut self) -> Result<(), DriverError> {
        let addr = (self.params.address.as_str(), self.params.port)
            .to_socket_addrs()
            .map_err(|_| DriverError::Resolve(self.params.address.clone()))?
            .next()
            .ok_or_else(|| DriverError::Resolve(self.params.address.clone()))?;

        let tcp = TcpStream::connect_timeout(&addr, self.params.timeout)?;

        let mut session = ssh2::Session::new()?;
        session.set_timeout(self.params.timeout.as_millis().min(u32::MAX as u128) as u32);
        session.set_tcp_stream(tcp);
        session.handshake()?;

        let username = self.params.username.clone().unwrap_or_default();
        let password = self.params.password.clone().unwrap_or_default();
        session
            .userauth_password(&username, &password)
            .map_err(|_| DriverError::Authentication(username.clone()))?;
        if !session.authenticated() {
            return Err(DriverError::Authentication(username));
        }

        tracing::debug!(address = %self.params.address, port = self.params.port, "ssh session established");
        self.session = Some(session);
        Ok(())
    }

    fn get_facts(&mut self) -> Result<Facts, DriverError> {
        let output = self.run_command(SHOW_VERSION)?;
        parse_show_version(&output)
    }

    fn close(&mut self) -> Result<(), DriverError> {
        if let Some(session) = self.session.take() {
            session.disconnect(None, "inventory collection finished", None)?;
        }
        Ok(())
    }
}

/// Parse the fact set out of IOS `show version` output.
pub fn parse_show_version(output: &str) -> Result<Facts, DriverError> {
    let mut hostname = None;
    let mut uptime_seconds = None;
    let mut os_version = None;
    let mut model = None;
    let mut serial_number = None;

    for line in output.lines() {
        let trimmed = line.trim();

        if let Some((host, uptime)) = trimmed.split_once(" uptime is ") {
            hostname = Some(host.trim().to_string());
            uptime_seconds = parse_uptime(uptime);
        }

        if let Some((_, serial)) = trimmed.split_once("Processor board ID ") {
            serial_number = serial.split_whitespace().next().map(|s| s.to_string());
        }

        if os_version.is_none() {
            if let Some(idx) = trimmed.find("Cisco IOS Software") {
                // "Cisco IOS Software, <version>" or "Cisco IOS Software [Denali], <version>"
                os_version = trimmed[idx..]
                    .split_once(", ")
                    .map(|(_, version)| version.trim().to_string());
            } else if let Some((_, version)) = trimmed.split_once("IOS (tm) ") {
                os_version = Some(version.trim().to_string());
            }
        }

        if model.is_none() && trimmed.contains("bytes of") && trimmed.contains("memory") {
            let mut words = trimmed.split_whitespace();
            if let Some(first) = words.next() {
                if first.eq_ignore_ascii_case("cisco") {
                    model = words.next().map(|s| s.to_string());
                }
            }
        }
    }

    let non_empty = |value: Option<String>, name: &'static str| {
        value
            .filter(|v| !v.is_empty())
            .ok_or(DriverError::MissingFact(name))
    };

    Ok(Facts {
        hostname: non_empty(hostname, "hostname")?,
        vendor: VENDOR.to_string(),
        model: non_empty(model, "model")?,
        os_version: non_empty(os_version, "os_version")?,
        serial_number: non_empty(serial_number, "serial_number")?,
        uptime_seconds,
    })
}

/// Convert "1 year, 2 weeks, 3 days, 4 hours, 5 minutes" to seconds.
fn parse_uptime(uptime: &str) -> Option<u64> {
    let mut total = 0u64;
    let mut matched = false;

    for part in uptime.split(',') {
        let mut words = part.split_whitespace();
        let (Some(count), Some(unit)) = (words.next(), words.next()) else {
            continue;
        };
        let Ok(count) = count.parse::<u64>() else {
            continue;
        };

        let seconds = match unit.trim_end_matches('s') {
            "year" => 31_536_000,
            "week" => 604_800,
            "day" => 86_400,
            "hour" => 3_600,
            "minute" => 60,
            "second" => 1,
            _ => continue,
        };
        total += count * seconds;
        matched = true;
    }

    matched.then_some(total)
}
