pub mod solar_vis;
