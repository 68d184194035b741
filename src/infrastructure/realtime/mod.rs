pub mod paste_broadcast;

pub use paste_broadcast::BroadcastPastePublisher;
