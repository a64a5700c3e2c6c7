#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use jointcap_geometry as geometry;

#[doc(inline)]
pub use jointcap_io as io;

#[doc(inline)]
pub use jointcap_camera as camera;

#[doc(inline)]
pub use jointcap_skeleton as skeleton;

#[doc(inline)]
pub use jointcap_scene as scene;
