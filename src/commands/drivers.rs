use crate::drivers::available_drivers;

pub fn handle_drivers_command() -> Result<(), Box<dyn std::error::Error>> {
    for name in available_drivers() {
        println!("{}", name);
    }
    Ok(())
}
