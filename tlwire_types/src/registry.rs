use crate::error::{DecodeError, Malformation};
use crate::limits::DecodeLimits;
use crate::schema::{SchemaObject, WireType, BOOL_FALSE_SCHEMA, BOOL_TRUE_SCHEMA};
use crate::serde::{ByteCursor, ConstructorId, FlagsWord};
use crate::types::{AbstractType, Deser, KnownType, Object};
use anyhow::{anyhow, Result};
use std::collections::hash_map::{Entry as MapEntry, HashMap};
use tracing::{debug, trace};


/// Decodes the body that follows an already-consumed constructor ID.
pub type Factory = fn(&mut ByteCursor<'_>) -> Result<Box<dyn Object>, DecodeError>;

#[derive(Clone, Copy)]
pub struct Entry {
    pub schema: &'static SchemaObject,
    pub factory: Factory,
}

fn decode_boxed<T: KnownType>(r: &mut ByteCursor<'_>) -> Result<Box<dyn Object>, DecodeError> {
    Ok(Box::new(T::deser_body(r)?))
}
fn decode_bool_true(_r: &mut ByteCursor<'_>) -> Result<Box<dyn Object>, DecodeError> {
    Ok(Box::new(true))
}
fn decode_bool_false(_r: &mut ByteCursor<'_>) -> Result<Box<dyn Object>, DecodeError> {
    Ok(Box::new(false))
}

/// Collects a layer's constructors. Every registration happens here, before any
/// decode can run; [`RegistryBuilder::build`] freezes the result.
pub struct RegistryBuilder {
    layer: u32,
    entries: HashMap<ConstructorId, Entry>,
    abstracts: HashMap<&'static str, &'static [ConstructorId]>,
    limits: DecodeLimits,
}

impl RegistryBuilder {
    /// Starts with the builtin `boolTrue` and `boolFalse` constructors.
    pub fn new(layer: u32) -> Self {
        let mut entries = HashMap::new();
        for (schema, factory) in [
            (&BOOL_TRUE_SCHEMA, decode_bool_true as Factory),
            (&BOOL_FALSE_SCHEMA, decode_bool_false as Factory),
        ] {
            entries.insert(schema.constructor_id, Entry { schema, factory });
        }
        Self {
            layer,
            entries,
            abstracts: HashMap::new(),
            limits: DecodeLimits::default(),
        }
    }

    pub fn limits(mut self, limits: DecodeLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Registers one constructor. Its ID is `schema.constructor_id`; `factory` decodes
    /// the body that follows that ID.
    pub fn register_type(&mut self, schema: &'static SchemaObject, factory: Factory) -> Result<()> {
        schema.validate()?;
        match self.entries.entry(schema.constructor_id) {
            MapEntry::Occupied(occ) => Err(anyhow!(
                "Constructor {} is already registered as {}; cannot register {}.",
                schema.constructor_id,
                occ.get().schema.qualified_name,
                schema.qualified_name
            )),
            MapEntry::Vacant(vac) => {
                debug!(layer = self.layer, %schema, "registered constructor");
                vac.insert(Entry { schema, factory });
                Ok(())
            }
        }
    }

    pub fn register<T: KnownType>(&mut self) -> Result<()> {
        if T::SCHEMA.constructor_id != T::CONSTRUCTOR_ID {
            return Err(anyhow!(
                "{}: CONSTRUCTOR_ID {} disagrees with its schema's {}",
                T::SCHEMA.qualified_name,
                T::CONSTRUCTOR_ID,
                T::SCHEMA.constructor_id
            ));
        }
        self.register_type(T::SCHEMA, decode_boxed::<T>)
    }

    /// Registers `A`'s variant set, which skipping then checks abstract fields against.
    /// Every variant must already be registered with `A`'s result type.
    pub fn register_abstract<A: AbstractType>(&mut self) -> Result<()> {
        for id in A::VARIANT_IDS {
            let entry = self
                .entries
                .get(id)
                .ok_or_else(|| anyhow!("{}: variant {} is not registered", A::TL_NAME, id))?;
            if entry.schema.result_type != A::TL_NAME {
                return Err(anyhow!(
                    "{}: variant {} produces {}",
                    A::TL_NAME,
                    entry.schema.qualified_name,
                    entry.schema.result_type
                ));
            }
        }
        match self.abstracts.entry(A::TL_NAME) {
            MapEntry::Occupied(_) => Err(anyhow!(
                "Abstract type {} is already registered",
                A::TL_NAME
            )),
            MapEntry::Vacant(vac) => {
                debug!(layer = self.layer, abstract_type = A::TL_NAME, "registered abstract type");
                vac.insert(A::VARIANT_IDS);
                Ok(())
            }
        }
    }

    pub fn build(self) -> Registry {
        debug!(
            layer = self.layer,
            constructors = self.entries.len(),
            "registry built"
        );
        Registry {
            layer: self.layer,
            entries: self.entries,
            abstracts: self.abstracts,
            limits: self.limits,
        }
    }
}

/// Constructor ID → factory, for one layer. Immutable once built, so it can be
/// shared across threads by reference without locking.
pub struct Registry {
    layer: u32,
    entries: HashMap<ConstructorId, Entry>,
    abstracts: HashMap<&'static str, &'static [ConstructorId]>,
    limits: DecodeLimits,
}

impl Registry {
    pub fn layer(&self) -> u32 {
        self.layer
    }
    pub fn limits(&self) -> &DecodeLimits {
        &self.limits
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn contains(&self, id: ConstructorId) -> bool {
        self.entries.contains_key(&id)
    }
    pub fn schema(&self, id: ConstructorId) -> Option<&'static SchemaObject> {
        self.entries.get(&id).map(|entry| entry.schema)
    }
    pub fn variants(&self, abstract_type: &str) -> Option<&'static [ConstructorId]> {
        self.abstracts.get(abstract_type).copied()
    }

    pub fn cursor<'a>(&'a self, bytes: &'a [u8]) -> ByteCursor<'a> {
        ByteCursor::new(bytes, self)
    }

    fn lookup(&self, id: ConstructorId) -> Result<&Entry, DecodeError> {
        self.entries.get(&id).ok_or_else(|| {
            debug!(layer = self.layer, %id, "unknown constructor");
            DecodeError::UnknownConstructor(id)
        })
    }

    /// Reads a constructor ID and hands the rest of the object to its factory.
    pub fn resolve_and_decode(
        &self,
        r: &mut ByteCursor<'_>,
    ) -> Result<Box<dyn Object>, DecodeError> {
        r.nested(|r| {
            let id = r.read_id()?;
            let entry = self.lookup(id)?;
            (entry.factory)(r)
        })
    }

    /// Like [`Registry::resolve_and_decode`], but an ID outside `variant_ids` fails
    /// before the factory runs.
    pub fn resolve_and_decode_variant(
        &self,
        r: &mut ByteCursor<'_>,
        abstract_type: &'static str,
        variant_ids: &[ConstructorId],
    ) -> Result<Box<dyn Object>, DecodeError> {
        r.nested(|r| {
            let id = r.read_id()?;
            self.check_variant(id, abstract_type, variant_ids)?;
            let entry = self.lookup(id)?;
            (entry.factory)(r)
        })
    }

    /// An unregistered ID is `UnknownConstructor` whether or not it is a variant.
    fn check_variant(
        &self,
        id: ConstructorId,
        abstract_type: &'static str,
        variant_ids: &[ConstructorId],
    ) -> Result<(), DecodeError> {
        self.lookup(id)?;
        if variant_ids.contains(&id) {
            Ok(())
        } else {
            Err(DecodeError::UnexpectedVariant {
                abstract_type,
                got: id,
            })
        }
    }

    /// Decodes exactly one `T` spanning all of `bytes`.
    pub fn decode_as<T: Deser>(&self, bytes: &[u8]) -> Result<T, DecodeError> {
        let mut r = self.cursor(bytes);
        let res = r.decode::<T>().and_then(|t| match r.remaining() {
            0 => Ok(t),
            trailing => Err(Malformation::TrailingBytes(trailing).into()),
        });
        if let Err(e) = &res {
            trace!(
                expected = std::any::type_name::<T>(),
                len = bytes.len(),
                error = %e,
                "decode failed"
            );
        }
        res
    }

    /// Decodes the object at the front of `bytes`. Returns it with the number of
    /// bytes it occupied; anything after that is left alone.
    pub fn decode_any(&self, bytes: &[u8]) -> Result<(Box<dyn Object>, usize), DecodeError> {
        let mut r = self.cursor(bytes);
        match r.decode_dyn() {
            Ok(obj) => Ok((obj, r.position())),
            Err(e) => {
                trace!(len = bytes.len(), error = %e, "decode failed");
                Err(e)
            }
        }
    }

    /// Walks the object at the cursor using only the field tables. Fails exactly
    /// where decoding would, provided every abstract type in use is registered.
    /// Returns the number of bytes skipped.
    pub fn skip_any(&self, r: &mut ByteCursor<'_>) -> Result<usize, DecodeError> {
        let start = r.position();
        self.skip_object(r, None)?;
        Ok(r.position() - start)
    }

    pub fn skip_len(&self, bytes: &[u8]) -> Result<usize, DecodeError> {
        self.skip_any(&mut self.cursor(bytes))
    }

    fn skip_object(
        &self,
        r: &mut ByteCursor<'_>,
        abstract_type: Option<&'static str>,
    ) -> Result<(), DecodeError> {
        r.nested(|r| {
            let id = r.read_id()?;
            let schema = self.lookup(id)?.schema;
            match abstract_type.map(|name| (name, self.abstracts.get(name))) {
                Some((name, Some(variant_ids))) => self.check_variant(id, name, variant_ids)?,
                /* Unregistered abstract type: fall back to the schema's result type. */
                Some((name, None)) if schema.result_type != name => {
                    return Err(DecodeError::UnexpectedVariant {
                        abstract_type: name,
                        got: id,
                    });
                }
                _ => {}
            }
            self.skip_fields(r, schema)
        })
    }

    fn skip_fields(&self, r: &mut ByteCursor<'_>, schema: &SchemaObject) -> Result<(), DecodeError> {
        let mut flags = FlagsWord::empty();
        for field in schema.fields {
            if let Some(bit) = field.optional_bit {
                if !flags.has(bit) {
                    continue;
                }
            }
            match field.wire_type {
                WireType::FlagsWord => flags = r.read_flags(schema)?,
                wire_type => self.skip_value(r, &wire_type)?,
            }
        }
        Ok(())
    }

    fn skip_value(&self, r: &mut ByteCursor<'_>, wire_type: &WireType) -> Result<(), DecodeError> {
        match wire_type {
            WireType::True => Ok(()),
            WireType::Int32 => r.skip_fixed(4),
            WireType::Int64 => r.skip_fixed(8),
            WireType::FlagsWord => r.skip_fixed(4),
            WireType::Bool => r.read_bool().map(|_| ()),
            WireType::Bytes => r.read_bytes_ref().map(|_| ()),
            WireType::String => r.read_str_ref().map(|_| ()),
            WireType::Vector(elem) => {
                let count = r.read_vector_header()?;
                for _ in 0..count {
                    self.skip_value(r, elem)?;
                }
                Ok(())
            }
            WireType::Object(abstract_type) => self.skip_object(r, Some(*abstract_type)),
        }
    }

    /// One schema line per constructor, ordered by ID.
    pub fn describe(&self) -> String {
        let mut schemas = self
            .entries
            .values()
            .map(|entry| entry.schema)
            .collect::<Vec<_>>();
        schemas.sort_by_key(|schema| schema.constructor_id);
        schemas
            .iter()
            .map(|schema| schema.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
