pub mod alphas;
