mod destiny;
mod properties;
mod settings;
mod validation;
