/// Fixture: excerpts of the GLFW 3 header

pub const GLFW3_EXCERPT: &str = r#"#ifndef _glfw3_h_
#define _glfw3_h_

#if defined(_WIN32) && defined(_GLFW_BUILD_DLL)
 #define GLFWAPI __declspec(dllexport)
#else
 #define GLFWAPI
#endif

#define GLFW_VERSION_MAJOR          3
#define GLFW_VERSION_MINOR          2
#define GLFW_TRUE                   1
#define GLFW_FALSE                  0
#define GLFW_KEY_SPACE              32
#define GLFW_KEY_ESCAPE             256
#define GLFW_DONT_CARE              -1

typedef void (*GLFWglproc)(void);
typedef struct GLFWmonitor GLFWmonitor;
typedef struct GLFWwindow GLFWwindow;
typedef void (* GLFWerrorfun)(int,const char*);
typedef void (* GLFWkeyfun)(GLFWwindow*,int,int,int,int);

GLFWAPI int glfwInit(void);
GLFWAPI void glfwTerminate(void);
GLFWAPI GLFWerrorfun glfwSetErrorCallback(GLFWerrorfun cbfun);
GLFWAPI GLFWwindow* glfwCreateWindow(int width, int height, const char* title, GLFWmonitor* monitor, GLFWwindow* share);
GLFWAPI void glfwSwapBuffers(GLFWwindow* window);

#endif /* _glfw3_h_ */
"#;

pub const DUPLICATE_TYPEDEF: &str = r#"typedef struct GLFWwindow GLFWwindow;
typedef struct GLFWmonitor GLFWmonitor;
typedef struct GLFWwindow GLFWwindow;
GLFWAPI void glfwPollEvents(void);
"#;
