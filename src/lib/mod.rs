pub mod colortables;
