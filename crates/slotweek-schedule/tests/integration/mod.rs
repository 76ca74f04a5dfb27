mod request_shape;
mod validation;
