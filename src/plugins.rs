//! Plugins for enhancing the default implementation of autotex can be defined in this module.

pub mod html_math;
