mod counters;
mod helpers;
mod members;
