//! Containers and the objects they refer to.

use std::fmt;

use super::expressions::write_factor;
use super::foundation::{OutputOptions, Textify};
use crate::ast::{
    BackgroundDescriptor, CardDescriptor, ChunkContainer, ContainerDescriptor, Layer,
    LayerDescriptor, ObjectDescriptor, ObjectIdentification, Ordinal, PartDescriptor, PartType,
    RelativeOrdinal,
};

impl Ordinal {
    /// The ordinal word, `None` for a numeric position.
    pub fn word(&self) -> Option<&'static str> {
        Some(match self {
            Ordinal::Number(_) => return None,
            Ordinal::First => "first",
            Ordinal::Second => "second",
            Ordinal::Third => "third",
            Ordinal::Fourth => "fourth",
            Ordinal::Fifth => "fifth",
            Ordinal::Sixth => "sixth",
            Ordinal::Seventh => "seventh",
            Ordinal::Eighth => "eighth",
            Ordinal::Ninth => "ninth",
            Ordinal::Tenth => "tenth",
            Ordinal::Middle => "middle",
            Ordinal::Last => "last",
            Ordinal::Any => "any",
        })
    }
}

impl ObjectIdentification {
    fn ordinal_word(&self) -> Option<&'static str> {
        match self {
            ObjectIdentification::ByOrdinal(ordinal) => ordinal.word(),
            _ => None,
        }
    }
}

impl Textify for Ordinal {
    fn textify<W: fmt::Write>(&self, options: &OutputOptions, w: &mut W) -> fmt::Result {
        match (self, self.word()) {
            (Ordinal::Number(position), _) => write_factor(position, options, w),
            (_, Some(word)) => w.write_str(word),
            (_, None) => Ok(()),
        }
    }
}

impl Textify for ObjectIdentification {
    fn textify<W: fmt::Write>(&self, options: &OutputOptions, w: &mut W) -> fmt::Result {
        match self {
            ObjectIdentification::ById(id) => {
                w.write_str("id ")?;
                write_factor(id, options, w)
            }
            ObjectIdentification::ByName(name) => write_factor(name, options, w),
            ObjectIdentification::ByOrdinal(ordinal) => ordinal.textify(options, w),
        }
    }
}

impl Textify for Layer {
    fn textify<W: fmt::Write>(&self, options: &OutputOptions, w: &mut W) -> fmt::Result {
        w.write_str(match self {
            Layer::Card => options.keyword("card", "cd"),
            Layer::Background => options.keyword("background", "bg"),
        })
    }
}

impl Textify for PartType {
    fn textify<W: fmt::Write>(&self, options: &OutputOptions, w: &mut W) -> fmt::Result {
        w.write_str(match self {
            PartType::Field => options.keyword("field", "fld"),
            PartType::Button => options.keyword("button", "btn"),
            PartType::Part => "part",
        })
    }
}

/// `this card`, `first card`, `card id 3` and the like, with `keyword`
/// naming the layer.
fn write_layer_descriptor<W: fmt::Write>(
    descriptor: &LayerDescriptor,
    keyword: Layer,
    options: &OutputOptions,
    w: &mut W,
) -> fmt::Result {
    match descriptor {
        LayerDescriptor::Relative(relative) => {
            w.write_str(match relative {
                RelativeOrdinal::Current => "this ",
                RelativeOrdinal::Next => "next ",
                RelativeOrdinal::Previous => options.keyword("previous ", "prev "),
            })?;
            keyword.textify(options, w)
        }
        LayerDescriptor::Identified(identification) => match identification.ordinal_word() {
            Some(word) => {
                write!(w, "{word} ")?;
                keyword.textify(options, w)
            }
            None => {
                keyword.textify(options, w)?;
                w.write_char(' ')?;
                identification.textify(options, w)
            }
        },
    }
}

impl Textify for BackgroundDescriptor {
    fn textify<W: fmt::Write>(&self, options: &OutputOptions, w: &mut W) -> fmt::Result {
        write_layer_descriptor(&self.descriptor, Layer::Background, options, w)
    }
}

impl Textify for CardDescriptor {
    fn textify<W: fmt::Write>(&self, options: &OutputOptions, w: &mut W) -> fmt::Result {
        write_layer_descriptor(&self.descriptor, Layer::Card, options, w)?;
        if let Some(background) = &self.parent_background {
            w.write_str(" of ")?;
            background.textify(options, w)?;
        }
        Ok(())
    }
}

impl Textify for PartDescriptor {
    fn textify<W: fmt::Write>(&self, options: &OutputOptions, w: &mut W) -> fmt::Result {
        // The layer is always written, so the default layer rules never
        // come into play when reading the text back.
        match self.identification.ordinal_word() {
            Some(word) => {
                write!(w, "{word} ")?;
                self.layer.textify(options, w)?;
                w.write_char(' ')?;
                self.part_type.textify(options, w)?;
            }
            None => {
                self.layer.textify(options, w)?;
                w.write_char(' ')?;
                self.part_type.textify(options, w)?;
                w.write_char(' ')?;
                self.identification.textify(options, w)?;
            }
        }
        if self.card != CardDescriptor::current() {
            w.write_str(" of ")?;
            self.card.textify(options, w)?;
        }
        Ok(())
    }
}

impl Textify for ObjectDescriptor {
    fn textify<W: fmt::Write>(&self, options: &OutputOptions, w: &mut W) -> fmt::Result {
        match self {
            ObjectDescriptor::Part(part) => part.textify(options, w),
            ObjectDescriptor::Card(card) => card.textify(options, w),
            ObjectDescriptor::Background(background) => background.textify(options, w),
        }
    }
}

impl Textify for ChunkContainer {
    fn textify<W: fmt::Write>(&self, options: &OutputOptions, w: &mut W) -> fmt::Result {
        self.chunk.textify(options, w)?;
        w.write_str(" of ")?;
        self.container.textify(options, w)
    }
}

impl Textify for ContainerDescriptor {
    fn textify<W: fmt::Write>(&self, options: &OutputOptions, w: &mut W) -> fmt::Result {
        match self {
            ContainerDescriptor::Variable(identifier) => w.write_str(identifier),
            ContainerDescriptor::ButtonOrField(part) => part.textify(options, w),
            ContainerDescriptor::MessageBox => {
                if options.explicit_the {
                    w.write_str("the ")?;
                }
                w.write_str(options.keyword("message box", "msg box"))
            }
            ContainerDescriptor::Selection => {
                if options.explicit_the {
                    w.write_str("the ")?;
                }
                w.write_str("selection")
            }
            ContainerDescriptor::ChunkOf(chunk) => chunk.textify(options, w),
        }
    }
}
