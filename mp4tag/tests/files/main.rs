#![allow(missing_docs)]

mod mp4;
