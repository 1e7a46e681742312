use crate::cargador::cargar_documento;
use crate::configuracion::Configuracion;
use crate::error::ErrorFci;
use log::info;
use serde_json::Value;
use std::collections::BTreeSet;

/// Agrega a `claves` todas las claves de los objetos contenidos en `valor`, a cualquier profundidad.
pub fn recolectar_en(valor: &Value, claves: &mut BTreeSet<String>) {
    match valor {
        Value::Object(mapa) => {
            for (clave, hijo) in mapa {
                claves.insert(clave.clone());
                recolectar_en(hijo, claves);
            }
        }
        Value::Array(elementos) => {
            for elemento in elementos {
                recolectar_en(elemento, claves);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
    }
}

pub fn recolectar_claves(valor: &Value) -> BTreeSet<String> {
    let mut claves = BTreeSet::new();
    recolectar_en(valor, &mut claves);
    claves
}

/// Claves sin repetir, en orden lexicografico ascendente.
pub fn listar_claves(valor: &Value) -> Vec<String> {
    recolectar_claves(valor).into_iter().collect()
}

// Una clave por linea, cada una terminada en salto de linea
pub fn formatear_claves(claves: &[String]) -> String {
    let mut salida = String::new();
    for clave in claves {
        salida.push_str(clave);
        salida.push('\n');
    }
    salida
}

/// Corre el listado completo y devuelve el texto a imprimir.
pub fn ejecutar_listado(config: &Configuracion) -> Result<String, ErrorFci> {
    let documento = cargar_documento(&config.ruta_archivo)?;
    let claves = listar_claves(&documento);
    info!("Claves distintas encontradas: {}", claves.len());
    Ok(formatear_claves(&claves))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_claves_anidadas_en_objetos_y_listas() {
        let documento = json!({"a": {"b": 1}, "c": [{"d": 2}]});
        assert_eq!(listar_claves(&documento), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_claves_repetidas_aparecen_una_vez() {
        let documento = json!({
            "data": [
                {"id": 1, "clase_fondos": [{"id": 10, "nombre": "A"}]},
                {"id": 2, "clase_fondos": [{"id": 11, "nombre": "B"}]}
            ]
        });
        assert_eq!(
            listar_claves(&documento),
            vec!["clase_fondos", "data", "id", "nombre"]
        );
    }

    #[test]
    fn test_listas_de_listas() {
        let documento = json!([[{"z": null}], [[{"y": [{"x": true}]}]]]);
        assert_eq!(listar_claves(&documento), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_escalares_no_tienen_claves() {
        for documento in [json!(1), json!("texto"), json!(null), json!(false), json!([1, 2])] {
            assert!(listar_claves(&documento).is_empty());
        }
    }

    #[test]
    fn test_orden_por_punto_de_codigo() {
        let documento = json!({"b": 0, "B": 0, "a": 0, "ñ": 0, "_": 0});
        assert_eq!(listar_claves(&documento), vec!["B", "_", "a", "b", "ñ"]);
    }

    #[test]
    fn test_formatear_claves() {
        let claves = vec!["a".to_string(), "b".to_string()];
        assert_eq!(formatear_claves(&claves), "a\nb\n");
        assert_eq!(formatear_claves(&[]), "");
    }
}
