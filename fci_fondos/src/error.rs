// error.rs

use std::fmt;
use std::io;
use std::path::PathBuf;

// Errores posibles al cargar y recorrer fci.json
#[derive(Debug)]
pub enum ErrorFci {
    Lectura { ruta: PathBuf, error: io::Error },
    Parseo(serde_json::Error),
    Estructura(String),
    Argumento(String),
}

// El mensaje es el del error subyacente, sin prefijo: el prefijo "Error: " lo pone quien imprime
impl fmt::Display for ErrorFci {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorFci::Lectura { ruta, error } => write!(f, "{}: '{}'", error, ruta.display()),
            ErrorFci::Parseo(e) => write!(f, "{}", e),
            ErrorFci::Estructura(description) => {
                write!(f, "Estructura inesperada: {}", description)
            }
            ErrorFci::Argumento(description) => {
                write!(f, "Argumento invalido: {}", description)
            }
        }
    }
}

impl std::error::Error for ErrorFci {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ErrorFci::Lectura { error, .. } => Some(error),
            ErrorFci::Parseo(e) => Some(e),
            _ => None,
        }
    }
}

impl ErrorFci {
    /// Error de lectura que recuerda el archivo que se intento abrir.
    pub fn lectura(ruta: impl Into<PathBuf>, error: io::Error) -> Self {
        ErrorFci::Lectura {
            ruta: ruta.into(),
            error,
        }
    }
}

impl From<serde_json::Error> for ErrorFci {
    fn from(e: serde_json::Error) -> Self {
        ErrorFci::Parseo(e)
    }
}

/// Linea que se imprime por stdout cuando una utilidad falla.
pub fn linea_de_error(error: &ErrorFci) -> String {
    format!("Error: {}", error)
}
