mod http_callback_notifier;

pub use http_callback_notifier::HttpCallbackNotifier;
