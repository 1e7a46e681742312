use serde_json::ser::{Formatter, PrettyFormatter};
use std::io::{self, Write};

/// Formato indentado con 2 espacios que escribe todo caracter no ASCII como `\uXXXX`
/// (pares sustitutos para los que quedan fuera del plano basico). La salida queda
/// siempre en ASCII.
pub struct FormatoAsciiIndentado<'a> {
    interno: PrettyFormatter<'a>,
}

impl<'a> FormatoAsciiIndentado<'a> {
    pub fn new() -> Self {
        FormatoAsciiIndentado {
            interno: PrettyFormatter::with_indent(b"  "),
        }
    }
}

impl<'a> Default for FormatoAsciiIndentado<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Formatter for FormatoAsciiIndentado<'a> {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut inicio = 0;
        for (i, c) in fragment.char_indices() {
            if c.is_ascii() {
                continue;
            }
            writer.write_all(fragment[inicio..i].as_bytes())?;
            let mut unidades = [0u16; 2];
            for unidad in c.encode_utf16(&mut unidades) {
                write!(writer, "\\u{:04x}", unidad)?;
            }
            inicio = i + c.len_utf8();
        }
        writer.write_all(fragment[inicio..].as_bytes())
    }

    // El resto delega en PrettyFormatter para conservar la indentacion

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.interno.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.interno.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.interno.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.interno.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.interno.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.interno.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.interno.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.interno.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.interno.end_object_value(writer)
    }
}
