mod gestures;
mod listener_scope;
