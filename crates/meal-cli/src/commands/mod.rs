pub mod battle;
pub mod clear;
pub mod db_check;
pub mod dispatch;
pub mod leaderboard;
pub mod meal;
