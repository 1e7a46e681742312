pub mod cargador;
pub mod configuracion;
pub mod error;
pub mod extractor_fondos;
pub mod formato_ascii;
pub mod logger;
pub mod recolector_claves;
