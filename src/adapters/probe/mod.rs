pub mod http_probe;
