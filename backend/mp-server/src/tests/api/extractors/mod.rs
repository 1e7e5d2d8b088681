mod session_token;
