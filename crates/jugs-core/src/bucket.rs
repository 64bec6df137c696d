//! A single bucket with a fixed capacity and a current quantity.

use std::fmt;

/// A bucket holding `quantity` units out of a maximum of `capacity`.
///
/// The invariant `0 <= quantity <= capacity` with `capacity > 0` is checked
/// on construction and preserved by every operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBucket"))]
pub struct Bucket {
    pub(crate) capacity: i32,
    pub(crate) quantity: i32,
}

impl Bucket {
    /// Create a bucket with the given capacity and quantity.
    pub fn new(capacity: i32, quantity: i32) -> Result<Self, BucketError> {
        if capacity <= 0 {
            return Err(BucketError::NonPositiveCapacity { capacity });
        }
        if !(0..=capacity).contains(&quantity) {
            return Err(BucketError::QuantityOutOfRange { capacity, quantity });
        }
        Ok(Self { capacity, quantity })
    }

    /// Create an empty bucket with the given capacity.
    pub fn with_capacity(capacity: i32) -> Result<Self, BucketError> {
        Self::new(capacity, 0)
    }

    #[inline]
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    #[inline]
    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    /// Free room left in the bucket.
    #[inline]
    pub fn room(&self) -> i32 {
        self.capacity - self.quantity
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.quantity == self.capacity
    }

    /// Fill the bucket to its capacity.
    #[inline]
    pub fn fill(&mut self) {
        self.quantity = self.capacity;
    }

    /// Empty the bucket.
    #[inline]
    pub fn empty(&mut self) {
        self.quantity = 0;
    }

    /// Pour as much as fits from this bucket into `other`.
    ///
    /// Moves `min(self.quantity, other.room())` units and returns that amount.
    pub fn pour_to(&mut self, other: &mut Bucket) -> i32 {
        let transfer = self.quantity.min(other.room());
        self.quantity -= transfer;
        other.quantity += transfer;
        transfer
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBucket {
    capacity: i32,
    quantity: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBucket> for Bucket {
    type Error = BucketError;

    fn try_from(raw: RawBucket) -> Result<Self, Self::Error> {
        Bucket::new(raw.capacity, raw.quantity)
    }
}

/// Errors raised when building a bucket in an invalid state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BucketError {
    /// The capacity must be strictly positive.
    NonPositiveCapacity { capacity: i32 },
    /// The quantity must lie within `[0, capacity]`.
    QuantityOutOfRange { capacity: i32, quantity: i32 },
}

impl fmt::Display for BucketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveCapacity { capacity } => {
                write!(f, "invalid bucket: capacity {capacity} is not greater than zero")
            }
            Self::QuantityOutOfRange { capacity, quantity } => write!(
                f,
                "invalid bucket: quantity {quantity} is outside [0, {capacity}]"
            ),
        }
    }
}

impl std::error::Error for BucketError {}
