pub mod compositor;
pub mod pack_deserializer;
pub mod pack_serializer;
pub mod texture;
