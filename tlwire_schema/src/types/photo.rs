use tlwire_types::abstract_type;
use tlwire_types::error::DecodeError;
use tlwire_types::schema::{Field, SchemaObject, WireType};
use tlwire_types::serde::{ByteCursor, ConstructorId, WireWriter, WriteLen};
use tlwire_types::types::KnownType;

abstract_type! {
    pub enum AnyPhotoSize as "PhotoSize" {
        Empty(PhotoSizeEmpty),
        Stripped(PhotoStrippedSize),
    }
}

/// `photoSizeEmpty#0e17e23c type:string = PhotoSize`
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct PhotoSizeEmpty {
    pub kind: String,
}
impl KnownType for PhotoSizeEmpty {
    const CONSTRUCTOR_ID: ConstructorId = ConstructorId(0x0e17e23c);
    const SCHEMA: &'static SchemaObject = &SchemaObject {
        constructor_id: Self::CONSTRUCTOR_ID,
        qualified_name: "photoSizeEmpty",
        result_type: AnyPhotoSize::TL_NAME,
        fields: &[Field::required("type", WireType::String)],
    };

    fn ser_body(&self, w: &mut WireWriter) -> WriteLen {
        w.write_string(&self.kind)
    }
    fn deser_body(r: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        let kind = r.read_string()?;
        Ok(Self { kind })
    }
}

/// A tiny inline preview. `bytes` is a JPEG body without its shared header.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct PhotoStrippedSize {
    pub kind: String,
    pub bytes: Vec<u8>,
}
impl KnownType for PhotoStrippedSize {
    const CONSTRUCTOR_ID: ConstructorId = ConstructorId(0xe0b0bc2e);
    const SCHEMA: &'static SchemaObject = &SchemaObject {
        constructor_id: Self::CONSTRUCTOR_ID,
        qualified_name: "photoStrippedSize",
        result_type: AnyPhotoSize::TL_NAME,
        fields: &[
            Field::required("type", WireType::String),
            Field::required("bytes", WireType::Bytes),
        ],
    };

    fn ser_body(&self, w: &mut WireWriter) -> WriteLen {
        let mut w_len = w.write_string(&self.kind);
        w_len += w.write_bytes(&self.bytes);
        w_len
    }
    fn deser_body(r: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        let kind = r.read_string()?;
        let bytes = r.read_bytes()?;
        Ok(Self { kind, bytes })
    }
}
