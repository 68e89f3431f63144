use std::borrow::Cow;
use std::marker::PhantomData;

use poem_openapi::registry::{MetaSchemaRef, Registry};
use poem_openapi::types::{ParseFromJSON, ParseResult, Type};
use serde_json::Value;

/// JSON request body accepted as-is and documented with the schema of `T`
///
/// poem-openapi would otherwise reject a malformed body before the handler
/// runs, with its own error shape. Handlers receive the raw value and run it
/// through the bike validator so failures can be reported field by field.
pub struct RawBody<T> {
    value: Value,
    _schema: PhantomData<fn() -> T>,
}

impl<T> RawBody<T> {
    pub fn new(value: Value) -> Self {
        Self {
            value,
            _schema: PhantomData,
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl<T: Type> Type for RawBody<T> {
    const IS_REQUIRED: bool = true;

    type RawValueType = Value;

    type RawElementValueType = Value;

    fn name() -> Cow<'static, str> {
        T::name()
    }

    fn schema_ref() -> MetaSchemaRef {
        T::schema_ref()
    }

    fn register(registry: &mut Registry) {
        T::register(registry);
    }

    fn as_raw_value(&self) -> Option<&Self::RawValueType> {
        Some(&self.value)
    }

    fn raw_element_iter<'a>(
        &'a self,
    ) -> Box<dyn Iterator<Item = &'a Self::RawElementValueType> + 'a> {
        Box::new(self.as_raw_value().into_iter())
    }
}

impl<T: Type> ParseFromJSON for RawBody<T> {
    fn parse_from_json(value: Option<Value>) -> ParseResult<Self> {
        Ok(Self::new(value.unwrap_or_default()))
    }
}
