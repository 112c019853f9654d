//! Application Services - 无状态的应用服务

mod audio_validator;

pub use audio_validator::{
    audio_extension, validate_audio, MAX_AUDIO_SIZE_BYTES, SUPPORTED_EXTENSIONS,
};
