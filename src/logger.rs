#[ctor::ctor]
fn init() {
    use log4rs;
    if let Err(error) = log4rs::init_file("log4rs.yaml", Default::default()) {
        eprintln!("Logging disabled, could not read log4rs.yaml: {}", error);
    }
}
