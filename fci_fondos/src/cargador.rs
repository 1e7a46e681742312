use crate::error::ErrorFci;
use log::{debug, info};
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Abre el archivo indicado y lo parsea como un unico documento JSON.
///
/// El archivo se cierra al salir de la funcion, tanto si el parseo termina bien
/// como si falla a mitad de camino.
pub fn cargar_documento(ruta: &Path) -> Result<Value, ErrorFci> {
    info!("Cargando documento: {}", ruta.display());
    let archivo = File::open(ruta).map_err(|e| ErrorFci::lectura(ruta, e))?;
    let reader = BufReader::new(archivo);
    let documento: Value = serde_json::from_reader(reader)?;
    debug!("Documento cargado: {}", describir_tipo(&documento));
    Ok(documento)
}

// Nombre legible del tipo de valor, para logs y mensajes de estructura
pub fn describir_tipo(valor: &Value) -> &'static str {
    match valor {
        Value::Null => "null",
        Value::Bool(_) => "booleano",
        Value::Number(_) => "numero",
        Value::String(_) => "texto",
        Value::Array(_) => "lista",
        Value::Object(_) => "objeto",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn escribir_archivo(dir: &tempfile::TempDir, contenido: &str) -> std::path::PathBuf {
        let ruta = dir.path().join("fci.json");
        let mut archivo = File::create(&ruta).unwrap();
        archivo.write_all(contenido.as_bytes()).unwrap();
        ruta
    }

    #[test]
    fn test_carga_documento_valido() {
        let dir = tempfile::tempdir().unwrap();
        let ruta = escribir_archivo(&dir, r#"{"data": [{"id": 1}]}"#);
        let documento = cargar_documento(&ruta).unwrap();
        assert_eq!(documento, json!({"data": [{"id": 1}]}));
    }

    #[test]
    fn test_archivo_inexistente_es_error_de_lectura() {
        let dir = tempfile::tempdir().unwrap();
        let ruta = dir.path().join("fci.json");
        let error = cargar_documento(&ruta).unwrap_err();
        assert!(matches!(error, ErrorFci::Lectura { .. }));
        assert!(
            error.to_string().ends_with(&format!("'{}'", ruta.display())),
            "{}",
            error
        );
    }

    #[test]
    fn test_json_malformado_es_error_de_parseo() {
        let dir = tempfile::tempdir().unwrap();
        let ruta = escribir_archivo(&dir, r#"{"data": ["#);
        assert!(matches!(cargar_documento(&ruta), Err(ErrorFci::Parseo(_))));
    }

    #[test]
    fn test_escalar_en_la_raiz_es_valido() {
        let dir = tempfile::tempdir().unwrap();
        let ruta = escribir_archivo(&dir, "42");
        assert_eq!(cargar_documento(&ruta).unwrap(), json!(42));
    }

    #[test]
    fn test_describir_tipo() {
        assert_eq!(describir_tipo(&json!([])), "lista");
        assert_eq!(describir_tipo(&json!({})), "objeto");
        assert_eq!(describir_tipo(&Value::Null), "null");
    }
}
