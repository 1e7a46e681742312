use crate::cargador::{cargar_documento, describir_tipo};
use crate::configuracion::Configuracion;
use crate::error::ErrorFci;
use crate::formato_ascii::FormatoAsciiIndentado;
use log::{debug, info};
use serde::Serialize;
use serde_json::{Map, Value};

/// Clase de fondo aplanada junto con el id del fondo al que pertenece.
/// Los campos ausentes en el documento quedan en `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntradaClase {
    #[serde(rename = "fondoId")]
    pub fondo_id: Value,
    #[serde(rename = "claseId")]
    pub clase_id: Value,
    pub nombre: Value,
}

fn campo_o_null(objeto: &Map<String, Value>, campo: &str) -> Value {
    objeto.get(campo).cloned().unwrap_or(Value::Null)
}

fn como_objeto<'a>(
    valor: &'a Value,
    que_es: &str,
) -> Result<&'a Map<String, Value>, ErrorFci> {
    match valor {
        Value::Object(mapa) => Ok(mapa),
        otro => Err(ErrorFci::Estructura(format!(
            "{} deberia ser un objeto y es {}",
            que_es,
            describir_tipo(otro)
        ))),
    }
}

// Ausente cuenta como lista vacia; null es un error como cualquier otro tipo
fn como_lista<'a>(valor: Option<&'a Value>, que_es: &str) -> Result<&'a [Value], ErrorFci> {
    match valor {
        None => Ok(&[][..]),
        Some(Value::Array(elementos)) => Ok(elementos.as_slice()),
        Some(otro) => Err(ErrorFci::Estructura(format!(
            "{} deberia ser una lista y es {}",
            que_es,
            describir_tipo(otro)
        ))),
    }
}

/// Recorre `data` -> fondos -> `clase_fondos` en el orden del documento y devuelve
/// a lo sumo `limite` entradas. El limite es global: cuenta entre todos los fondos.
pub fn extraer_clases(documento: &Value, limite: usize) -> Result<Vec<EntradaClase>, ErrorFci> {
    let raiz = como_objeto(documento, "el documento")?;
    let fondos = como_lista(raiz.get("data"), "'data'")?;
    debug!("Fondos en el documento: {}", fondos.len());

    // Cada fondo visitado se valida aunque el limite ya este cubierto: con limite 0
    // se valida el primero y el corte ocurre al terminar su recorrido
    let mut entradas = Vec::new();
    for (i, fondo) in fondos.iter().enumerate() {
        let fondo = como_objeto(fondo, &format!("el fondo {}", i))?;
        let fondo_id = campo_o_null(fondo, "id");
        let clases = como_lista(
            fondo.get("clase_fondos"),
            &format!("'clase_fondos' del fondo {}", i),
        )?;

        for (j, clase) in clases.iter().enumerate() {
            if entradas.len() >= limite {
                break;
            }
            let clase = como_objeto(clase, &format!("la clase {} del fondo {}", j, i))?;
            entradas.push(EntradaClase {
                fondo_id: fondo_id.clone(),
                clase_id: campo_o_null(clase, "id"),
                nombre: campo_o_null(clase, "nombre"),
            });
        }
        if entradas.len() >= limite {
            break;
        }
    }

    Ok(entradas)
}

/// Lista JSON con indentacion de 2 espacios y caracteres no ASCII escapados.
pub fn formatear_entradas(entradas: &[EntradaClase]) -> Result<String, ErrorFci> {
    let mut salida = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut salida, FormatoAsciiIndentado::new());
    entradas.serialize(&mut serializer)?;
    // El formato solo emite ASCII
    Ok(String::from_utf8_lossy(&salida).into_owned())
}

/// Corre la extraccion completa y devuelve el texto a imprimir.
pub fn ejecutar_extraccion(config: &Configuracion) -> Result<String, ErrorFci> {
    let documento = cargar_documento(&config.ruta_archivo)?;
    let entradas = extraer_clases(&documento, config.limite)?;
    info!(
        "Entradas extraidas: {} (limite {})",
        entradas.len(),
        config.limite
    );
    formatear_entradas(&entradas)
}
