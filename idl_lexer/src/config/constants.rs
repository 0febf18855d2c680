pub mod compile_time {
    pub mod file_processing {
        /// Maximum file size allowed for processing (10MB)
        /// SECURITY: Prevents resource exhaustion via large inputs
        pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

        /// Threshold for considering a file "large" (1MB)
        /// PERFORMANCE: Affects logging detail for big documents
        pub const LARGE_FILE_THRESHOLD: u64 = 1024 * 1024;
    }

    pub mod logging {
        /// Maximum log message length
        /// RESOURCE: Prevents memory attacks via huge messages
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 10_000;

        /// Log buffer size for batch operations
        /// RESOURCE: Controls memory usage for logging
        pub const LOG_BUFFER_SIZE: usize = 10_000;

        /// Minimum log level for security events (cannot be changed at runtime)
        /// SECURITY: Ensures warnings and errors are always logged
        pub const SECURITY_MIN_LOG_LEVEL: u8 = 1;
    }
}
