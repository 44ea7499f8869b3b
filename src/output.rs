use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented JSON
    Pretty,
    /// Compact JSON, one document
    Json,
    Yaml,
}

pub fn render<T: Serialize>(data: &T, format: OutputFormat) -> Result<String, Box<dyn std::error::Error>> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(data)?,
        OutputFormat::Yaml => serde_yaml::to_string(data)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(data)?,
    };
    Ok(rendered)
}

pub fn output_data<T: Serialize>(data: &T, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", render(data, format)?);
    Ok(())
}

pub fn print_success(message: &str) {
    println!("✅ {}", message);
}

pub fn print_error(message: &str) {
    eprintln!("\x1b[31m❌ Error: {}\x1b[0m", message);
}

pub fn print_warning(message: &str) {
    println!("\x1b[33m⚠️  Warning: {}\x1b[0m", message);
}

pub fn print_info(message: &str) {
    println!("ℹ️  {}", message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        hostname: &'static str,
    }

    #[test]
    fn renders_each_format() {
        let row = Row { hostname: "r1" };
        assert_eq!(render(&row, OutputFormat::Json).unwrap(), r#"{"hostname":"r1"}"#);
        assert_eq!(render(&row, OutputFormat::Yaml).unwrap(), "hostname: r1\n");
        assert!(render(&row, OutputFormat::Pretty).unwrap().contains("\n  \"hostname\": \"r1\""));
    }
}
