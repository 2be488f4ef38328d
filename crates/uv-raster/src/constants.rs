/// Number of UV channels a mesh can carry.
pub const MAX_UV_CHANNELS: usize = uv_raster_config::UV_CHANNEL_COUNT as usize;

/// Folder created under the output directory for saved textures.
pub const GENERATED_TEXTURES_DIR: &str = "GeneratedTextures";

/// File stem of saved textures. Collisions get " 1", " 2", ... appended.
pub const TEXTURE_FILE_STEM: &str = "UV_Texture";

/// Upper bound on unique-name probing before giving up.
pub const MAX_UNIQUE_NAME_ATTEMPTS: u32 = 10_000;
