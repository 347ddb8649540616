pub mod body;
pub mod mesh;
pub mod shader;
pub mod wave;
