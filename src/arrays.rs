use std::ops::Deref;

macro_rules! nbt_array {
    ($(#[$doc:meta])* $name:ident, $elem:ty) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Default)]
        pub struct $name {
            data: Vec<$elem>,
        }

        impl $name {
            pub fn new(data: Vec<$elem>) -> Self {
                Self { data }
            }

            pub fn into_inner(self) -> Vec<$elem> {
                self.data
            }
        }

        impl Deref for $name {
            type Target = [$elem];

            fn deref(&self) -> &Self::Target {
                &self.data
            }
        }

        impl From<Vec<$elem>> for $name {
            fn from(data: Vec<$elem>) -> Self {
                Self::new(data)
            }
        }
    };
}

nbt_array!(
    /// NBT Byte Array. Distinct from a List of Byte on the wire.
    ByteArray,
    i8
);

nbt_array!(
    /// NBT Int Array. Distinct from a List of Int on the wire.
    IntArray,
    i32
);

nbt_array!(
    /// NBT Long Array. Often used by Minecraft to store packed block data.
    LongArray,
    i64
);
