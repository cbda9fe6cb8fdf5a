mod carousel_robot_tests;
