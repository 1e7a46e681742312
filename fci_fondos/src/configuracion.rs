use crate::error::ErrorFci;
use std::path::PathBuf;

pub const ARCHIVO_POR_DEFECTO: &str = "fci.json";
pub const LIMITE_POR_DEFECTO: usize = 10;

/// Parametros de una corrida. Sin argumentos se lee `fci.json` del directorio
/// actual y el limite de extraccion es 10.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuracion {
    pub ruta_archivo: PathBuf,
    pub limite: usize,
}

impl Default for Configuracion {
    fn default() -> Self {
        Configuracion {
            ruta_archivo: PathBuf::from(ARCHIVO_POR_DEFECTO),
            limite: LIMITE_POR_DEFECTO,
        }
    }
}

impl Configuracion {
    /// `listar_claves [archivo]`
    ///
    /// `args` no incluye el nombre del programa.
    pub fn desde_args_claves(args: &[String]) -> Result<Self, ErrorFci> {
        if args.len() > 1 {
            return Err(ErrorFci::Argumento(format!(
                "se esperaba a lo sumo un argumento, se recibieron {}",
                args.len()
            )));
        }
        let mut config = Configuracion::default();
        if let Some(ruta) = args.first() {
            config.ruta_archivo = PathBuf::from(ruta);
        }
        Ok(config)
    }

    /// `extraer_fondos [limite] [archivo]`
    pub fn desde_args_extraccion(args: &[String]) -> Result<Self, ErrorFci> {
        if args.len() > 2 {
            return Err(ErrorFci::Argumento(format!(
                "se esperaban a lo sumo dos argumentos, se recibieron {}",
                args.len()
            )));
        }
        let mut config = Configuracion::default();
        if let Some(limite) = args.first() {
            config.limite = limite.trim().parse::<usize>().map_err(|_| {
                ErrorFci::Argumento(format!(
                    "el limite debe ser un entero no negativo: '{}'",
                    limite
                ))
            })?;
        }
        if let Some(ruta) = args.get(1) {
            config.ruta_archivo = PathBuf::from(ruta);
        }
        Ok(config)
    }
}
