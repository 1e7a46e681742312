use fci_fondos::configuracion::Configuracion;
use fci_fondos::error::linea_de_error;
use fci_fondos::logger::init_logger;
use fci_fondos::recolector_claves::ejecutar_listado;
use std::env;

// Imprime las claves de fci.json, una por linea y ordenadas
fn main() {
    if let Err(e) = init_logger() {
        eprintln!("Error al inicializar el logger: {}", e);
    }
    let args: Vec<String> = env::args().skip(1).collect();

    let resultado =
        Configuracion::desde_args_claves(&args).and_then(|config| ejecutar_listado(&config));

    match resultado {
        Ok(salida) => print!("{}", salida),
        Err(e) => {
            log::error!("Fallo el listado de claves: {:?}", e);
            println!("{}", linea_de_error(&e));
        }
    }
}
