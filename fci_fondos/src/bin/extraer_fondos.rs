use fci_fondos::configuracion::Configuracion;
use fci_fondos::error::linea_de_error;
use fci_fondos::extractor_fondos::ejecutar_extraccion;
use fci_fondos::logger::init_logger;
use std::env;

// Imprime las primeras clases de fondos de fci.json como una lista JSON
fn main() {
    if let Err(e) = init_logger() {
        eprintln!("Error al inicializar el logger: {}", e);
    }
    let args: Vec<String> = env::args().skip(1).collect();

    let resultado =
        Configuracion::desde_args_extraccion(&args).and_then(|config| ejecutar_extraccion(&config));

    match resultado {
        Ok(salida) => println!("{}", salida),
        Err(e) => {
            log::error!("Fallo la extraccion de fondos: {:?}", e);
            println!("{}", linea_de_error(&e));
        }
    }
}
