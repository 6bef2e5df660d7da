//! `no_std` stream engine and its pull-based sources.

/// Spliterator characteristic flags.
mod characteristics;
/// Copyable spliterator trait.
mod copyable_spliterator;
/// Demand model types.
mod demand;
/// Atomic demand counter.
mod demand_counter;
/// Demand bookkeeping shared by every subscription.
mod demand_subscription;
/// Flat-mapping pull spliterator.
mod flat_map_spliterator;
/// Closure-backed subscriber.
mod fn_subscriber;
/// Immutable integer range description.
mod index_range;
/// Re-slicing spliterator trait.
mod indexable_spliterator;
/// Spliterator over cloneable iterables.
mod iter_spliterator;
/// Mapping operator.
mod map_operator;
/// Mapping spliterator.
mod map_spliterator;
/// Operator trait.
mod operator;
/// Direction-reversible spliterator trait.
mod reversible_spliterator;
/// Reversing integer range spliterator.
mod reversing_range_spliterator;
/// Pull-based traversal trait.
mod spliterator;
/// Spliterator-to-operator adapter.
mod spliterator_operator;
/// Stream buffer implementation.
mod stream_buffer;
/// Stream buffer configuration.
mod stream_buffer_config;
/// Stream error definitions.
mod stream_error;
/// Subscriber trait.
mod subscriber;
/// Subscription trait.
mod subscription;
/// Test probes for operators and subscribers.
pub mod testing;
/// Zipping operator configuration.
mod zip_config;
/// Two-source zipping operator.
mod zipping_operator;

pub use characteristics::Characteristics;
pub use copyable_spliterator::CopyableSpliterator;
pub use demand::Demand;
pub use demand_counter::DemandCounter;
pub use demand_subscription::DemandSubscription;
pub use flat_map_spliterator::FlatMapSpliterator;
pub use fn_subscriber::FnSubscriber;
pub use index_range::IndexRange;
pub use indexable_spliterator::IndexableSpliterator;
pub use iter_spliterator::IterSpliterator;
pub use map_operator::MapOperator;
pub use map_spliterator::MapSpliterator;
pub use operator::{Operator, OperatorShared};
pub use reversible_spliterator::ReversibleSpliterator;
pub use reversing_range_spliterator::ReversingRangeSpliterator;
pub use spliterator::Spliterator;
pub use spliterator_operator::SpliteratorOperator;
pub use stream_buffer::StreamBuffer;
pub use stream_buffer_config::StreamBufferConfig;
pub use stream_error::StreamError;
pub use subscriber::{Subscriber, SubscriberShared};
pub use subscription::{Subscription, SubscriptionShared};
pub use zip_config::ZipConfig;
pub use zipping_operator::ZippingOperator;
